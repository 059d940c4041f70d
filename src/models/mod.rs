pub mod resume;
pub mod career;
pub mod skill_gap;
pub mod roadmap;
pub mod interview;
pub mod report;
pub mod lenient;

pub use resume::*;
pub use career::*;
pub use skill_gap::*;
pub use roadmap::*;
pub use interview::*;
pub use report::*;
