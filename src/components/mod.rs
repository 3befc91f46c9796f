pub mod city_map;
pub mod controls;
pub mod gauge;
pub mod rng;
pub mod sensors;
pub mod surface;
pub mod ticker;
pub mod what_if_modal;
