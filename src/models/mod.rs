pub mod hall_model;
pub mod movie_model;
pub mod showtime_model;
