//! Wire contract for the users service.
//!
//! The schema lives in `proto/users.proto`; the prost/tonic code generated
//! from it is committed under `src/gen/`.

pub mod users {
    pub mod v1 {
        include!("gen/users.v1.rs");
    }
}
