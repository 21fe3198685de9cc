pub mod booking;
pub mod event;
pub mod user;

pub use booking::{Booking, BookingStatus, NewBooking, TicketSelection};
pub use event::{Event, TicketPrices};
pub use user::{NewUser, User};
