//! Domain Entities
//!
//! Core domain entities (Shape, vehicles, phones, TodoList).

pub mod phone;
pub mod shape;
pub mod todo_list;
pub mod vehicle;

pub use phone::{
    try_call, try_connect_to_wifi, try_take_photo, CallReceipt, Caller, Camera, Capability,
    CapabilityResult, FeaturePhone, Phone, Photo, Smartphone, WifiClient, WifiSession,
};
pub use shape::{area, total_area, Circle, Rectangle, Shape, Square};
pub use todo_list::TodoList;
pub use vehicle::{fleet_range, HybridVehicle, StandardVehicle, Vehicle};
