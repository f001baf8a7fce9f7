mod todo;

pub use todo::{Todo, TodoDraft, TodoPatch};
