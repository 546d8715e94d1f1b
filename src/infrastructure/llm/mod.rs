mod gateway_factory;
mod gradio_gateway;
mod mock_inference_gateway;
mod openai_gateway;
mod transport_error;

pub use gateway_factory::{InferenceGatewayFactory, InferenceGatewayFactoryError};
pub use gradio_gateway::{GradioGateway, HUGGING_FACE_HUB_URL, parse_completion_event};
pub use mock_inference_gateway::{
    FailingInferenceGateway, MockInferenceGateway, RecordingInferenceGateway,
};
pub use openai_gateway::OpenAiGateway;
