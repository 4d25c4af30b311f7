pub mod plot_machine;
pub mod round;
pub mod session;
