pub mod dog;
pub mod fact;
pub mod screen;

pub use dog::{DogImageRef, ImageBytes};
pub use fact::Fact;
pub use screen::{Score, Selection};
