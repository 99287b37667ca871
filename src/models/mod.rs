mod dataset;
mod school_year;

pub use dataset::Dataset;
pub use school_year::SchoolYear;
