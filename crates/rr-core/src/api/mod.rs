pub mod match_request;
pub mod match_response;

pub use match_request::{FieldText, MatchRequest, ResumeData};
pub use match_response::{MatchHistoryEntry, MatchResponse};
