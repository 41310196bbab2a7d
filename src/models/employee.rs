use super::event::EmployeeId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(skip_serializing)]
    pub pin_hash: String,
    pub active: bool,
    pub created_at: String,
}
