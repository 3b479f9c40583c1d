use anyhow::Result;

use super::{print_json, Service};

pub fn status(service: &Service, session_id: &str) -> Result<()> {
    print_json(&service.status(session_id)?)
}

pub fn delete(service: &Service, session_id: &str) -> Result<()> {
    service.delete(session_id)?;
    println!("Session {} and all derived data deleted", session_id);
    Ok(())
}
