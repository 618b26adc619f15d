//! API Models
//!
//! Data structures matching the results API. Wire names are camelCase;
//! unknown fields are ignored and optional fields default so that server
//! additions never break decoding.

mod competition;
mod people;
mod search;
mod skater;
mod tossie;
mod user;

pub use competition::{Competition, CompetitionSummary, EventResults, EventSummary, ResultRow, SegmentSummary};
pub use people::{Club, ClubSkater, Official, OfficialAssignment};
pub use search::{SearchHit, SearchResults};
pub use skater::{Deduction, ElementScore, JudgeDetails, ProgramComponent, SkaterHistoryEntry, SkaterProfile};
pub use tossie::{OpenTossieRequest, SendTossieRequest, TossieReceipt};
pub use user::{
    AuthResponse, FeedbackSubmission, GoogleCredential, MapPin, ProfileCustomization, SocialLinks,
    UploadResponse, User, UserProfile,
};
