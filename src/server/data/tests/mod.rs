mod company;
mod geo;
