// Output formatting — terminal display and the JSON report file.

pub mod json;
pub mod terminal;
