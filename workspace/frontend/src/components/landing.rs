//! Static building blocks of the landing page. None of them hold state or
//! fetch data.

mod carousel;
mod header;
mod navbar;

pub use carousel::Carousel;
pub use header::Header;
pub use navbar::Navbar;
