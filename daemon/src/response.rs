use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Success {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub error: String,
}
