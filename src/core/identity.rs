//! Employee identity: PIN hashing and verification, registry lookups.

use crate::db::queries::find_employee_by_name;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand_core::OsRng;
use rusqlite::Connection;

/// PINs are 4 to 12 ASCII digits.
pub fn validate_pin(pin: &str) -> AppResult<()> {
    if (4..=12).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::MalformedPin)
    }
}

/// Argon2 PHC string for `pin`.
pub fn hash_pin(pin: &str) -> AppResult<String> {
    validate_pin(pin)?;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::PinHash(e.to_string()))
}

pub fn verify_pin(pin: &str, pin_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(pin_hash).map_err(|e| AppError::PinHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(pin.as_bytes(), &parsed)
        .is_ok())
}

/// Resolve an active employee by name and check the PIN.
pub fn authenticate(conn: &Connection, name: &str, pin: &str) -> AppResult<Employee> {
    let emp =
        find_employee_by_name(conn, name)?.ok_or_else(|| AppError::UnknownEmployee(name.into()))?;

    if !emp.active {
        return Err(AppError::InactiveEmployee(emp.name));
    }

    if !verify_pin(pin, &emp.pin_hash)? {
        return Err(AppError::InvalidPin(emp.name));
    }

    Ok(emp)
}
