//! Academic timetabling core.
//!
//! In-memory scheduling and conflict-resolution engine for an academic
//! timetable: rooms, teachers, student groups, subjects, time slots, the
//! sessions linking them, a conflict detector, and a greedy first-fit
//! scheduler. The crate performs no I/O, rendering, or persistence;
//! loading entities and presenting results belong to outer layers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Room`, `Teacher`,
//!   `StudentGroup`, `Subject`, `Session`, `Timetable`, `Reservation`
//! - **`conflict`**: Stateless pairwise conflict detection
//! - **`scheduler`**: Greedy first-fit placement of demands
//! - **`validation`**: Input integrity checks before a scheduling run
//! - **`view`**: Role-based timetable consultation
//! - **`error`**: One error type per failure class
//!
//! # Concurrency
//!
//! Single-threaded and synchronous throughout. The [`models::Timetable`]
//! assumes one logical writer; callers needing concurrent mutation must
//! serialize access externally.

pub mod conflict;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod view;
