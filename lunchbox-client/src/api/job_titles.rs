use shared::models::{AssignJobTitleRequest, Employee, JobTitle, JobTitleCreate, JobTitleUpdate};

use super::{Api, segment};
use crate::{ClientResult, HttpClient};

const JOB_TITLES: &str = "job-titles";

impl<C: HttpClient> Api<C> {
    // ========== Job Title API ==========

    pub async fn list_job_titles(&self) -> ClientResult<Vec<JobTitle>> {
        self.http.get(JOB_TITLES).await
    }

    pub async fn create_job_title(&self, payload: &JobTitleCreate) -> ClientResult<JobTitle> {
        self.http.post(JOB_TITLES, payload).await
    }

    pub async fn update_job_title(
        &self,
        id: &str,
        payload: &JobTitleUpdate,
    ) -> ClientResult<JobTitle> {
        self.http
            .patch(&format!("{JOB_TITLES}/{}", segment(id)), payload)
            .await
    }

    pub async fn delete_job_title(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete(&format!("{JOB_TITLES}/{}", segment(id)))
            .await
    }

    pub async fn assign_job_title(
        &self,
        job_title_id: &str,
        employee_id: &str,
    ) -> ClientResult<Employee> {
        let body = AssignJobTitleRequest {
            employee_id: employee_id.to_string(),
        };
        self.http
            .post(&format!("{JOB_TITLES}/{}/assign", segment(job_title_id)), &body)
            .await
    }
}
