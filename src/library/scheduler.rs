pub mod impl_display_rate;
pub mod impl_fake;
pub mod interface;
