pub mod batch;
pub mod code_area;
pub mod codec;
pub mod plus_code;
pub mod shorten;

pub use batch::{decode_batch, encode_batch};
pub use code_area::CodeArea;
pub use codec::{compute_latitude_precision, decode, encode};
pub use plus_code::{PlusCode, PlusCodeBuilder};
pub use shorten::{recover_nearest, shorten};
