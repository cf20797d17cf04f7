use aws_sdk_dynamodb::error::DisplayErrorContext;
use model::player::AttributeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    // code, message and the whole source chain
    #[error("{}", DisplayErrorContext(.0))]
    Dynamo(#[from] aws_sdk_dynamodb::Error),
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}
