/// Runs an action a fixed number of times. Used for sequential growth, where
/// each repetition must observe the state left by the previous one.
pub fn repeat<F: FnMut()>(count: u32, mut action: F) {
    for _ in 0..count {
        action();
    }
}
