// Playlist domain module

#![allow(clippy::module_inception)]

pub mod playlist;

pub use playlist::{Playlist, PlaylistId};
