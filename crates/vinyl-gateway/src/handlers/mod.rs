mod albums;
mod health;

pub use albums::{
    create_album_handler, delete_album_handler, get_album_handler, list_albums_handler,
};
pub use health::health_handler;
