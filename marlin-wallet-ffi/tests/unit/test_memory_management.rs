#[cfg(test)]
mod tests {
    use crate::*;
    use serial_test::serial;
    use std::ffi::CString;
    use std::os::raw::c_int;

    #[test]
    #[serial]
    fn string_memory_lifecycle() {
        unsafe {
            let ffi_string = FFIString::new("Hello, wallet!");
            assert!(!ffi_string.ptr.is_null());
            assert_eq!(ffi_string.length, "Hello, wallet!".len());

            let recovered = FFIString::from_ptr(ffi_string.ptr).unwrap();
            assert_eq!(recovered, "Hello, wallet!");
            marlin_wallet_ffi_string_destroy(ffi_string);

            let empty = FFIString::new("");
            assert!(!empty.ptr.is_null());
            assert_eq!(empty.length, 0);
            marlin_wallet_ffi_string_destroy(empty);

            // Null strings from failed accessors are safe to destroy.
            marlin_wallet_ffi_string_destroy(FFIString::null());
        }
    }

    #[test]
    #[serial]
    fn byte_vector_copies_the_caller_buffer() {
        unsafe {
            let mut buffer = vec![0xAAu8, 0xBB, 0xCC];
            let mut error: c_int = 0;
            let handle =
                marlin_wallet_ffi_byte_vector_create(buffer.as_ptr(), 3, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);

            // Mutating and dropping the original buffer must not affect the
            // created vector.
            buffer.iter_mut().for_each(|b| *b = 0);
            drop(buffer);

            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(handle, 0, &mut error), 0xAA);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(handle, 1, &mut error), 0xBB);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(handle, 2, &mut error), 0xCC);
            assert_eq!(error, FFIErrorCode::Success as c_int);

            marlin_wallet_ffi_byte_vector_destroy(handle);
        }
    }

    #[test]
    #[serial]
    fn empty_byte_vector_is_valid() {
        unsafe {
            let mut error: c_int = 0;
            let handle = marlin_wallet_ffi_byte_vector_create(std::ptr::null(), 0, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_length(handle, &mut error), 0);
            marlin_wallet_ffi_byte_vector_destroy(handle);
        }
    }

    #[test]
    #[serial]
    fn null_buffer_with_nonzero_length_is_rejected() {
        unsafe {
            let mut error: c_int = 0;
            let handle = marlin_wallet_ffi_byte_vector_create(std::ptr::null(), 4, &mut error);
            assert_eq!(handle, 0);
            assert_eq!(error, FFIErrorCode::NullPointer as c_int);
        }
    }

    #[test]
    #[serial]
    fn contact_create_does_not_retain_the_alias_buffer() {
        unsafe {
            let mut error: c_int = 0;
            let key_bytes =
                marlin_wallet_ffi_byte_vector_create([3u8; 32].as_ptr(), 32, &mut error);
            let key = marlin_wallet_ffi_public_key_create(key_bytes, &mut error);

            let contact = {
                let alias = CString::new("Alice").unwrap();
                let handle = marlin_wallet_ffi_contact_create(alias.as_ptr(), key, &mut error);
                assert_eq!(error, FFIErrorCode::Success as c_int);
                handle
                // alias buffer freed here
            };

            let alias_out = marlin_wallet_ffi_contact_get_alias(contact, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            assert_eq!(FFIString::from_ptr(alias_out.ptr).unwrap(), "Alice");

            marlin_wallet_ffi_string_destroy(alias_out);
            marlin_wallet_ffi_contact_destroy(contact);
            marlin_wallet_ffi_public_key_destroy(key);
            marlin_wallet_ffi_byte_vector_destroy(key_bytes);
        }
    }

    #[test]
    #[serial]
    fn repeated_create_destroy_cycles() {
        unsafe {
            let mut error: c_int = 0;
            for i in 0..1000u32 {
                let data = [i as u8; 16];
                let handle =
                    marlin_wallet_ffi_byte_vector_create(data.as_ptr(), 16, &mut error);
                assert_eq!(error, FFIErrorCode::Success as c_int);
                marlin_wallet_ffi_byte_vector_destroy(handle);
            }
        }
    }
}
