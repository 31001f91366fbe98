use crate::errors::ServiceError;

use super::domain::{Employee, EmployeeInput, EmployeePatch, LookupKey};

/// Ordered in-memory employee collection with its id sequence.
///
/// Records keep creation order; by-name operations act on the first match in
/// that order. Ids come from a counter that only grows, so a deleted id is never
/// handed out again.
#[derive(Debug, Default)]
pub struct EmployeeTable {
    records: Vec<Employee>,
    next_id: i64,
}

impl EmployeeTable {
    pub fn new() -> Self { Self::default() }

    /// Assign the next id and append the record.
    pub fn create(&mut self, input: EmployeeInput) -> i64 {
        self.next_id += 1;
        let id = self.next_id;
        self.records.push(Employee { id, name: input.name, age: input.age });
        id
    }

    pub fn list_all(&self) -> &[Employee] { &self.records }

    pub fn find_by_id(&self, id: i64) -> Result<&Employee, ServiceError> {
        self.records
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found_id(id))
    }

    pub fn find_by_name(&self, name: &str) -> Result<&Employee, ServiceError> {
        self.records
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ServiceError::not_found_name(name))
    }

    /// Look up by a token that may be an id or a name.
    pub fn resolve(&self, token: &str) -> Result<&Employee, ServiceError> {
        match LookupKey::parse(token) {
            LookupKey::Id(id) => self.find_by_id(id),
            LookupKey::Name(name) => self.find_by_name(&name),
        }
    }

    /// Overwrite every mutable field of record `id`.
    pub fn replace(&mut self, id: i64, input: EmployeeInput) -> Result<(), ServiceError> {
        let rec = self.get_mut(id)?;
        *rec = Employee { id, name: input.name, age: input.age };
        Ok(())
    }

    /// Overwrite only the fields present in `patch`.
    pub fn merge_update(&mut self, id: i64, patch: EmployeePatch) -> Result<(), ServiceError> {
        let rec = self.get_mut(id)?;
        patch.apply(rec);
        rec.id = id;
        Ok(())
    }

    pub fn delete_by_id(&mut self, id: i64) -> Result<(), ServiceError> {
        let idx = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found_id(id))?;
        self.records.remove(idx);
        Ok(())
    }

    pub fn delete_by_name(&mut self, name: &str) -> Result<(), ServiceError> {
        let idx = self
            .records
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| ServiceError::not_found_name(name))?;
        self.records.remove(idx);
        Ok(())
    }

    /// Delete by a token that may be an id or a name; returns the key used.
    pub fn delete(&mut self, token: &str) -> Result<LookupKey, ServiceError> {
        let key = LookupKey::parse(token);
        match &key {
            LookupKey::Id(id) => self.delete_by_id(*id)?,
            LookupKey::Name(name) => self.delete_by_name(name)?,
        }
        Ok(key)
    }

    fn get_mut(&mut self, id: i64) -> Result<&mut Employee, ServiceError> {
        self.records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, age: i64) -> EmployeeInput {
        EmployeeInput { name: name.into(), age }
    }

    fn emp(id: i64, name: &str, age: i64) -> Employee {
        Employee { id, name: name.into(), age }
    }

    #[test]
    fn ids_increase_without_reuse_after_delete() {
        let mut t = EmployeeTable::new();
        assert_eq!(t.create(input("a", 1)), 1);
        assert_eq!(t.create(input("b", 2)), 2);
        t.delete_by_id(2).unwrap();
        t.delete_by_id(1).unwrap();
        assert_eq!(t.create(input("c", 3)), 3);
        assert_eq!(t.list_all(), &[emp(3, "c", 3)]);
    }

    #[test]
    fn find_by_id_returns_supplied_fields() {
        let mut t = EmployeeTable::new();
        let id = t.create(input("Sara", 34));
        assert_eq!(t.find_by_id(id).unwrap(), &emp(id, "Sara", 34));
        assert_eq!(t.find_by_id(42), Err(ServiceError::not_found_id(42)));
    }

    #[test]
    fn delete_then_find_is_not_found() {
        let mut t = EmployeeTable::new();
        let id = t.create(input("Bob", 30));
        t.delete_by_id(id).unwrap();
        assert_eq!(t.find_by_id(id), Err(ServiceError::not_found_id(id)));
        assert_eq!(t.delete_by_id(id), Err(ServiceError::not_found_id(id)));
    }

    #[test]
    fn merge_update_keeps_absent_fields() {
        let mut t = EmployeeTable::new();
        let id = t.create(input("Bob", 30));
        t.merge_update(id, EmployeePatch { name: None, age: Some(32) }).unwrap();
        assert_eq!(t.find_by_id(id).unwrap(), &emp(id, "Bob", 32));
        t.merge_update(id, EmployeePatch { name: Some("Rob".into()), age: None }).unwrap();
        assert_eq!(t.find_by_id(id).unwrap(), &emp(id, "Rob", 32));
        assert_eq!(
            t.merge_update(9, EmployeePatch::default()),
            Err(ServiceError::not_found_id(9))
        );
    }

    #[test]
    fn replace_overwrites_both_fields() {
        let mut t = EmployeeTable::new();
        let id = t.create(input("Bob", 30));
        t.replace(id, input("", 34)).unwrap();
        assert_eq!(t.find_by_id(id).unwrap(), &emp(id, "", 34));
        assert_eq!(t.replace(5, input("x", 1)), Err(ServiceError::not_found_id(5)));
        assert_eq!(t.list_all().len(), 1);
    }

    #[test]
    fn resolve_numeric_token_is_always_an_id() {
        let mut t = EmployeeTable::new();
        for n in 1..=4 {
            t.create(input(&format!("p{n}"), n));
        }
        t.create(input("Eve", 50));
        t.create(input("5", 60));
        assert_eq!(t.resolve("5").unwrap(), &emp(5, "Eve", 50));
        // the record named "5" is still unreachable by token once id 5 is gone
        t.delete_by_id(5).unwrap();
        assert_eq!(t.resolve("5"), Err(ServiceError::not_found_id(5)));
        assert_eq!(t.find_by_name("5").unwrap(), &emp(6, "5", 60));
    }

    #[test]
    fn resolve_name_picks_first_inserted() {
        let mut t = EmployeeTable::new();
        t.create(input("Bob", 30));
        t.create(input("Bob", 40));
        assert_eq!(t.resolve("Bob").unwrap(), &emp(1, "Bob", 30));
        t.delete_by_name("Bob").unwrap();
        assert_eq!(t.resolve("Bob").unwrap(), &emp(2, "Bob", 40));
        assert_eq!(t.resolve("0"), Err(ServiceError::not_found_name("0")));
    }

    #[test]
    fn delete_token_reports_key_and_preserves_order() {
        let mut t = EmployeeTable::new();
        t.create(input("a", 1));
        t.create(input("b", 2));
        t.create(input("c", 3));
        assert_eq!(t.delete("b").unwrap(), LookupKey::Name("b".into()));
        assert_eq!(t.delete("3").unwrap(), LookupKey::Id(3));
        assert_eq!(t.list_all(), &[emp(1, "a", 1)]);
        assert_eq!(t.delete("zed"), Err(ServiceError::not_found_name("zed")));
    }

    #[test]
    fn walkthrough_scenario() {
        let mut t = EmployeeTable::new();
        assert_eq!(t.create(input("Bob", 30)), 1);
        assert_eq!(t.create(input("Sara", 34)), 2);
        assert_eq!(t.find_by_id(1).unwrap(), &emp(1, "Bob", 30));
        t.merge_update(1, EmployeePatch { name: None, age: Some(32) }).unwrap();
        assert_eq!(t.find_by_id(1).unwrap(), &emp(1, "Bob", 32));
        t.delete_by_name("Bob").unwrap();
        assert_eq!(t.find_by_id(1), Err(ServiceError::not_found_id(1)));
        assert_eq!(t.list_all(), &[emp(2, "Sara", 34)]);
    }
}
