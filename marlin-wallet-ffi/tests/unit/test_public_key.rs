#[cfg(test)]
mod tests {
    use crate::*;
    use serial_test::serial;
    use std::ffi::CString;
    use std::os::raw::c_int;

    #[test]
    #[serial]
    fn key_from_bytes_round_trips() {
        unsafe {
            let mut error: c_int = 0;
            let data: Vec<u8> = (0..32).collect();
            let bytes = marlin_wallet_ffi_byte_vector_create(data.as_ptr(), 32, &mut error);
            let key = marlin_wallet_ffi_public_key_create(bytes, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            assert!(key != 0);

            let out = marlin_wallet_ffi_public_key_get_bytes(key, &mut error);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_length(out, &mut error), 32);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(out, 0, &mut error), 0);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(out, 31, &mut error), 31);

            marlin_wallet_ffi_byte_vector_destroy(out);
            marlin_wallet_ffi_byte_vector_destroy(bytes);
            marlin_wallet_ffi_public_key_destroy(key);
        }
    }

    #[test]
    #[serial]
    fn key_from_hex_matches_key_from_bytes() {
        unsafe {
            let mut error: c_int = 0;
            let hex = CString::new("ab".repeat(32)).unwrap();
            let key = marlin_wallet_ffi_public_key_from_hex(hex.as_ptr(), &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);

            let out = marlin_wallet_ffi_public_key_get_bytes(key, &mut error);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_length(out, &mut error), 32);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(out, 0, &mut error), 0xAB);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(out, 31, &mut error), 0xAB);

            marlin_wallet_ffi_byte_vector_destroy(out);
            marlin_wallet_ffi_public_key_destroy(key);
        }
    }

    #[test]
    #[serial]
    fn wrong_length_key_material_rejected() {
        unsafe {
            let mut error: c_int = 0;
            let bytes = marlin_wallet_ffi_byte_vector_create([1u8; 31].as_ptr(), 31, &mut error);
            let key = marlin_wallet_ffi_public_key_create(bytes, &mut error);
            assert_eq!(key, 0);
            assert_eq!(error, FFIErrorCode::InvalidPublicKey as c_int);
            marlin_wallet_ffi_byte_vector_destroy(bytes);
        }
    }

    #[test]
    #[serial]
    fn bad_hex_rejected() {
        unsafe {
            let mut error: c_int = 0;
            let hex = CString::new("zz".repeat(32)).unwrap();
            let key = marlin_wallet_ffi_public_key_from_hex(hex.as_ptr(), &mut error);
            assert_eq!(key, 0);
            assert_eq!(error, FFIErrorCode::InvalidPublicKey as c_int);
        }
    }
}
