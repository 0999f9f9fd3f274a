use roster_core::{Operation, StudentDraft, StudentId, StudentService};
use serde_json::json;

use crate::cli::{DeleteAllArgs, DraftArgs, IdArgs, UpdateArgs};
use crate::error::CliError;

use super::CommandResult;

fn draft(args: &DraftArgs) -> StudentDraft {
    StudentDraft::new(args.name.clone(), args.age)
}

pub async fn list<S: StudentService>(service: &S) -> Result<CommandResult, CliError> {
    CommandResult::from_outcome(Operation::List, service.list_students().await)
}

pub async fn get<S: StudentService>(service: &S, args: &IdArgs) -> Result<CommandResult, CliError> {
    CommandResult::from_outcome(
        Operation::Get,
        service.get_student(StudentId::new(args.id)).await,
    )
}

pub async fn create<S: StudentService>(
    service: &S,
    args: &DraftArgs,
) -> Result<CommandResult, CliError> {
    CommandResult::from_outcome(Operation::Create, service.create_student(draft(args)).await)
}

pub async fn update<S: StudentService>(
    service: &S,
    args: &UpdateArgs,
) -> Result<CommandResult, CliError> {
    let outcome = service
        .update_student(StudentId::new(args.id), draft(&args.draft))
        .await;
    CommandResult::from_outcome(Operation::Update, outcome)
}

pub async fn delete<S: StudentService>(
    service: &S,
    args: &IdArgs,
) -> Result<CommandResult, CliError> {
    let outcome = service
        .delete_student(StudentId::new(args.id))
        .await
        .map(|()| json!({ "deleted": args.id }));
    CommandResult::from_outcome(Operation::Delete, outcome)
}

pub async fn delete_all<S: StudentService>(
    service: &S,
    args: &DeleteAllArgs,
) -> Result<CommandResult, CliError> {
    CommandResult::from_outcome(
        Operation::DeleteAll,
        service.delete_all_students(args.confirm).await,
    )
}
