mod generate_webindex;

pub use generate_webindex::GenerateWebindexUseCase;
