#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatModelError {
    #[error("chat_model.empty_prompt")]
    EmptyPrompt,
    #[error("chat_model.unauthorized")]
    Unauthorized,
    #[error("chat_model.request_failed")]
    RequestFailed,
    #[error("chat_model.empty_response")]
    EmptyResponse,
}
