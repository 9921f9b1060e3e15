use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Payslip},
};

impl ApiClient {
    /// Previous-month payslip. All salary arithmetic is server-side; this
    /// is display data only.
    pub async fn get_my_payroll(&self) -> Result<Payslip, ApiError> {
        let response = self.send_authorized(Method::GET, "/payroll/me", None).await?;
        Self::parse_json(response).await
    }
}
