//! Plan command handlers.

mod add_entrepreneur;
mod create_plan;
mod get_plan_snapshot;
mod publish_plan;
mod remove_entrepreneur;
mod set_principal_owner;
mod update_owner_role;
mod update_owner_share;

pub use add_entrepreneur::{AddEntrepreneurCommand, AddEntrepreneurHandler, AddEntrepreneurResult};
pub use create_plan::{CreatePlanCommand, CreatePlanHandler, CreatePlanResult};
pub use get_plan_snapshot::{GetPlanSnapshotHandler, GetPlanSnapshotQuery};
pub use publish_plan::{PublishPlanCommand, PublishPlanHandler, PublishPlanResult};
pub use remove_entrepreneur::{
    RemoveEntrepreneurCommand, RemoveEntrepreneurHandler, RemoveEntrepreneurResult,
};
pub use set_principal_owner::{
    SetPrincipalOwnerCommand, SetPrincipalOwnerHandler, SetPrincipalOwnerResult,
};
pub use update_owner_role::{
    UpdateOwnerRoleCommand, UpdateOwnerRoleHandler, UpdateOwnerRoleResult,
};
pub use update_owner_share::{
    UpdateOwnerShareCommand, UpdateOwnerShareHandler, UpdateOwnerShareResult,
};
