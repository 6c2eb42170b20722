// Requests
pub mod create_task_request;
pub mod due_date_input;
pub mod update_task_request;

// Responses
pub mod api_response;
pub mod health_response;
pub mod task_response;
