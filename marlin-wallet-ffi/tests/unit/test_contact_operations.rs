#[cfg(test)]
mod tests {
    use crate::registry::{self, Object};
    use crate::*;
    use marlin_wallet::{Contact, PublicKey};
    use serial_test::serial;
    use std::ffi::CString;
    use std::os::raw::c_int;

    unsafe fn new_public_key(fill: u8) -> u64 {
        let mut error: c_int = 0;
        let bytes = marlin_wallet_ffi_byte_vector_create([fill; 32].as_ptr(), 32, &mut error);
        let key = marlin_wallet_ffi_public_key_create(bytes, &mut error);
        assert_eq!(error, FFIErrorCode::Success as c_int);
        marlin_wallet_ffi_byte_vector_destroy(bytes);
        key
    }

    #[test]
    #[serial]
    fn contact_round_trips_alias_and_key() {
        unsafe {
            let mut error: c_int = 0;
            let key = new_public_key(0x11);
            let alias = CString::new("Alice").unwrap();

            let contact = marlin_wallet_ffi_contact_create(alias.as_ptr(), key, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);

            let alias_out = marlin_wallet_ffi_contact_get_alias(contact, &mut error);
            assert_eq!(FFIString::from_ptr(alias_out.ptr).unwrap(), "Alice");
            marlin_wallet_ffi_string_destroy(alias_out);

            let key_out = marlin_wallet_ffi_contact_get_public_key(contact, &mut error);
            let bytes_out = marlin_wallet_ffi_public_key_get_bytes(key_out, &mut error);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_length(bytes_out, &mut error), 32);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(bytes_out, 0, &mut error), 0x11);
            assert_eq!(marlin_wallet_ffi_byte_vector_get_at(bytes_out, 31, &mut error), 0x11);

            marlin_wallet_ffi_byte_vector_destroy(bytes_out);
            marlin_wallet_ffi_public_key_destroy(key_out);
            marlin_wallet_ffi_contact_destroy(contact);
            marlin_wallet_ffi_public_key_destroy(key);
        }
    }

    #[test]
    #[serial]
    fn empty_alias_is_rejected() {
        unsafe {
            let mut error: c_int = 0;
            let key = new_public_key(0x22);
            let alias = CString::new("").unwrap();

            let contact = marlin_wallet_ffi_contact_create(alias.as_ptr(), key, &mut error);
            assert_eq!(contact, 0);
            assert_eq!(error, FFIErrorCode::ContactError as c_int);

            marlin_wallet_ffi_public_key_destroy(key);
        }
    }

    #[test]
    #[serial]
    fn contact_list_indexing_and_bounds() {
        unsafe {
            let contacts: Vec<Contact> = (1..=3u8)
                .map(|i| {
                    Contact::new(
                        format!("contact-{}", i),
                        PublicKey::from_bytes(&[i; 32]).unwrap(),
                    )
                    .unwrap()
                })
                .collect();
            let list = registry::insert(Object::Contacts(contacts));

            let mut error: c_int = 0;
            let length = marlin_wallet_ffi_contacts_get_length(list, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            assert_eq!(length, 3);

            for i in 0..length {
                let element = marlin_wallet_ffi_contacts_get_at(list, i, &mut error);
                assert_eq!(error, FFIErrorCode::Success as c_int);
                assert!(element != 0);

                let alias = marlin_wallet_ffi_contact_get_alias(element, &mut error);
                assert_eq!(
                    FFIString::from_ptr(alias.ptr).unwrap(),
                    format!("contact-{}", i + 1)
                );
                marlin_wallet_ffi_string_destroy(alias);
                marlin_wallet_ffi_contact_destroy(element);
            }

            let out_of_range = marlin_wallet_ffi_contacts_get_at(list, length, &mut error);
            assert_eq!(out_of_range, 0);
            assert_eq!(error, FFIErrorCode::IndexOutOfRange as c_int);

            marlin_wallet_ffi_contacts_destroy(list);
        }
    }

    #[test]
    #[serial]
    fn element_handles_outlive_the_list() {
        unsafe {
            let contacts = vec![Contact::new(
                "survivor",
                PublicKey::from_bytes(&[9u8; 32]).unwrap(),
            )
            .unwrap()];
            let list = registry::insert(Object::Contacts(contacts));

            let mut error: c_int = 0;
            let element = marlin_wallet_ffi_contacts_get_at(list, 0, &mut error);
            marlin_wallet_ffi_contacts_destroy(list);

            let alias = marlin_wallet_ffi_contact_get_alias(element, &mut error);
            assert_eq!(error, FFIErrorCode::Success as c_int);
            assert_eq!(FFIString::from_ptr(alias.ptr).unwrap(), "survivor");

            marlin_wallet_ffi_string_destroy(alias);
            marlin_wallet_ffi_contact_destroy(element);
        }
    }
}
