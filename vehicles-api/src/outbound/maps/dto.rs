//! DTO for decoding maps service responses.

use serde::Deserialize;

use crate::domain::Address;

#[derive(Debug, Deserialize)]
pub(super) struct AddressResponseDto {
    pub(super) address: String,
    pub(super) city: String,
    pub(super) state: String,
    pub(super) zip: String,
}

impl From<AddressResponseDto> for Address {
    fn from(value: AddressResponseDto) -> Self {
        Self {
            address: value.address,
            city: value.city,
            state: value.state,
            zip: value.zip,
        }
    }
}
