//! Typed HTTP client for the demandas backend
//!
//! One file per resource; all requests go through `ApiClient`.

mod backlogs;
mod client;
mod demands;
mod sprints;

pub use backlogs::{
    AddDemandsRequest, BacklogDetail, BacklogPage, CreateBacklogRequest, CreateBacklogResponse,
};
pub use client::{is_not_found, ApiClient};
pub use demands::{
    ChangeStatusRequest, ChangeStatusResponse, DemandDetail, DemandFilters, DemandPage,
    UpdateDemandRequest, UpdatePriorityRequest, UpdatePriorityResponse,
};
pub use sprints::{BurndownPoint, SprintList, UpdateItemStatusRequest, UpdateItemStatusResponse};
