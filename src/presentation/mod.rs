mod answer_session;

pub use answer_session::AnswerSession;
