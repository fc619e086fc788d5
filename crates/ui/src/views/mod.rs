mod quiz;
mod results;
mod start;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizScreen;
pub use results::ResultsCard;
pub use start::StartCard;
