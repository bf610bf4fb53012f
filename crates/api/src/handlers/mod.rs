pub mod authenticity;
pub mod crowd;
pub mod dashboard;
pub mod restoration;
pub mod sites;
