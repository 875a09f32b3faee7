/// Ends the process on error, printing the error with `Display` rather
/// than panicking with its `Debug` form.
pub trait DisplayError<T, E: std::fmt::Display> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E: std::fmt::Display> DisplayError<T, E> for std::result::Result<T, E> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            eprintln!("{}", render(&e));
            std::process::exit(1)
        })
    }
}

pub fn render(error: &impl std::fmt::Display) -> String {
    format!("❌ {} ❌", error)
}
