pub mod cat;
pub mod counter;
pub mod dog;
pub mod emitter;

pub use cat::{CatFactService, DEFAULT_CAT_FACT_URL};
pub use counter::Counter;
pub use dog::{DogImageService, DEFAULT_DOG_IMAGE_URL};
pub use emitter::Emitter;
