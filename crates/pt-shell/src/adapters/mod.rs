mod loading;

pub use loading::ConsoleLoadingIndicator;
