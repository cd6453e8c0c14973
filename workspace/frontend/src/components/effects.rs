mod count_up;
mod split_text;

pub use count_up::CountUp;
pub use split_text::SplitText;
