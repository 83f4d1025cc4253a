#[cfg(test)]
mod tests {
    use crate::*;
    use serial_test::serial;
    use std::ffi::CStr;
    use std::os::raw::c_int;

    unsafe fn new_byte_vector(data: &[u8]) -> u64 {
        let mut error: c_int = 0;
        let handle =
            marlin_wallet_ffi_byte_vector_create(data.as_ptr(), data.len() as u32, &mut error);
        assert_eq!(error, FFIErrorCode::Success as c_int);
        handle
    }

    #[test]
    #[serial]
    fn use_after_destroy_is_detected() {
        unsafe {
            let handle = new_byte_vector(&[1, 2, 3]);
            marlin_wallet_ffi_byte_vector_destroy(handle);

            let mut error: c_int = 0;
            let length = marlin_wallet_ffi_byte_vector_get_length(handle, &mut error);
            assert_eq!(length, 0);
            assert_eq!(error, FFIErrorCode::UseAfterFree as c_int);
        }
    }

    #[test]
    #[serial]
    fn double_destroy_is_detected() {
        unsafe {
            let handle = new_byte_vector(&[1]);
            marlin_wallet_ffi_byte_vector_destroy(handle);
            assert!(marlin_wallet_ffi_get_last_error().is_null());

            marlin_wallet_ffi_byte_vector_destroy(handle);
            let msg = marlin_wallet_ffi_get_last_error();
            assert!(!msg.is_null());
            let text = CStr::from_ptr(msg).to_str().unwrap();
            assert!(text.contains("destroyed"));
            marlin_wallet_ffi_clear_error();
        }
    }

    #[test]
    #[serial]
    fn slot_reuse_does_not_resurrect_old_handles() {
        unsafe {
            let old = new_byte_vector(&[1, 2, 3]);
            marlin_wallet_ffi_byte_vector_destroy(old);

            // New objects may reuse the slot, but with a fresh generation.
            let replacements: Vec<u64> = (0..8).map(|_| new_byte_vector(&[9])).collect();
            let mut error: c_int = 0;
            let _ = marlin_wallet_ffi_byte_vector_get_length(old, &mut error);
            assert_eq!(error, FFIErrorCode::UseAfterFree as c_int);

            for handle in replacements {
                marlin_wallet_ffi_byte_vector_destroy(handle);
            }
        }
    }

    #[test]
    #[serial]
    fn wrong_entity_type_is_rejected() {
        unsafe {
            let byte_vector = new_byte_vector(&[0u8; 32]);
            let mut error: c_int = 0;

            // A byte vector is not a contact list.
            let length = marlin_wallet_ffi_contacts_get_length(byte_vector, &mut error);
            assert_eq!(length, 0);
            assert_eq!(error, FFIErrorCode::InvalidHandle as c_int);

            // Destroy with a mismatched type leaves the object alive.
            marlin_wallet_ffi_contacts_destroy(byte_vector);
            let length = marlin_wallet_ffi_byte_vector_get_length(byte_vector, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            assert_eq!(length, 32);

            marlin_wallet_ffi_byte_vector_destroy(byte_vector);
        }
    }

    #[test]
    #[serial]
    fn destroying_one_handle_leaves_others_alive() {
        unsafe {
            let mut error: c_int = 0;
            let a = new_byte_vector(&[1, 1]);
            let b = new_byte_vector(&[2, 2, 2]);
            let key_bytes = new_byte_vector(&[5u8; 32]);
            let key = marlin_wallet_ffi_public_key_create(key_bytes, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);

            marlin_wallet_ffi_byte_vector_destroy(a);

            assert_eq!(marlin_wallet_ffi_byte_vector_get_length(b, &mut error), 3);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            let bytes = marlin_wallet_ffi_public_key_get_bytes(key, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_length(bytes, &mut error), 32);

            marlin_wallet_ffi_byte_vector_destroy(bytes);
            marlin_wallet_ffi_byte_vector_destroy(key_bytes);
            marlin_wallet_ffi_public_key_destroy(key);
            marlin_wallet_ffi_byte_vector_destroy(b);
        }
    }

    #[test]
    #[serial]
    fn zero_handle_is_never_valid() {
        unsafe {
            let mut error: c_int = 0;
            let _ = marlin_wallet_ffi_byte_vector_get_length(0, &mut error);
            assert_eq!(error, FFIErrorCode::NullPointer as c_int);
        }
    }
}
