use shared::Paginated;
use shared::models::{Employee, EmployeeFilter, Role, RoleChangeRequest};

use super::{Api, segment};
use crate::{ClientResult, HttpClient};

const EMPLOYEES: &str = "corporate/employees";

impl<C: HttpClient> Api<C> {
    // ========== Employee API ==========

    pub async fn list_employees(&self, filter: &EmployeeFilter) -> ClientResult<Paginated<Employee>> {
        self.http.get_with_query(EMPLOYEES, filter).await
    }

    pub async fn change_role(&self, employee_id: &str, role: Role) -> ClientResult<Employee> {
        self.http
            .patch(
                &format!("{EMPLOYEES}/{}/role", segment(employee_id)),
                &RoleChangeRequest { role },
            )
            .await
    }
}
