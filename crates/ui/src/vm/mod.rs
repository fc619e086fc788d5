mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{QuizIntent, advance_label, progress_percent};
pub use results_vm::{OptionHighlight, ScoreTier, ScoreVm, classify_option};
pub use time_fmt::format_duration;
