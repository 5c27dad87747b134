pub mod quiz_input;

pub use quiz_input::{
    answer_from_keys, handle_answer_keys, handle_answer_clicks, handle_quit_key, handle_window_resize,
    tick_feedback, QuizInputPlugin,
};
