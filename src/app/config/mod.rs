mod action_environment;

pub use action_environment::ActionEnvironment;
