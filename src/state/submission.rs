//! Submission state machine
//!
//! Orchestrates the validator and the prediction client into a single
//! observable state per form session. Transitions are the only mutation
//! path: the state value is replaced wholesale, never patched in place.
//! Once a request is in flight it runs to completion; there is no
//! cancellation or deadline (a known gap inherited from the service
//! contract).

use crate::api::{PredictionApi, PredictionResponse, RequestError};
use crate::state::form::FormValues;
use crate::state::validate::{validate, ValidationResult};

/// Where the current request stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No request issued since the last reset
    #[default]
    Idle,
    /// Exactly one request in flight
    Submitting,
    /// Last request answered with a recommendation
    Success { predicted_crop: String },
    /// Last request failed; carries the surfaced message
    Failed { message: String },
}

/// Result of asking the controller to start a submission
#[derive(Debug, PartialEq, Eq)]
pub enum BeginOutcome {
    /// Validation passed; the controller is now `Submitting`
    Ready,
    /// Validation failed; no request was issued and the state is unchanged
    Invalid(ValidationResult),
    /// A request is already in flight; the trigger is dropped, not queued
    Suppressed,
}

/// Result of a full submit call
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange ran to completion; inspect `state()` for the result
    Completed,
    /// Validation failed; no request was issued
    Invalid(ValidationResult),
    /// Dropped because a request was already in flight
    Suppressed,
}

/// Sole owner and writer of the [`SubmissionState`]
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// Try to start a submission.
    ///
    /// Validation runs first; only a fully valid form transitions to
    /// `Submitting`. While `Submitting`, further triggers are no-ops so
    /// at most one request is ever in flight.
    pub fn begin(&mut self, values: &FormValues) -> BeginOutcome {
        if self.is_submitting() {
            tracing::debug!("submit trigger suppressed: request already in flight");
            return BeginOutcome::Suppressed;
        }

        let result = validate(values);
        if !result.is_valid() {
            tracing::debug!(
                errors = result.field_errors.len(),
                "submission blocked by validation"
            );
            return BeginOutcome::Invalid(result);
        }

        // Discards any prior Success/Failed payload
        self.state = SubmissionState::Submitting;
        BeginOutcome::Ready
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Must follow a `Ready` from [`begin`](Self::begin); `Success` and
    /// `Failed` are only ever entered from `Submitting`.
    pub fn finish(&mut self, result: Result<PredictionResponse, RequestError>) {
        debug_assert!(self.is_submitting());
        self.state = match result {
            Ok(response) => {
                tracing::info!(crop = %response.predicted_crop, "prediction received");
                SubmissionState::Success {
                    predicted_crop: response.predicted_crop,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "prediction request failed");
                SubmissionState::Failed {
                    message: err.to_string(),
                }
            }
        };
    }

    /// Run one full validate → request → transition cycle
    pub async fn submit<C>(&mut self, values: &FormValues, client: &C) -> SubmitOutcome
    where
        C: PredictionApi + ?Sized,
    {
        match self.begin(values) {
            BeginOutcome::Suppressed => SubmitOutcome::Suppressed,
            BeginOutcome::Invalid(result) => SubmitOutcome::Invalid(result),
            BeginOutcome::Ready => {
                tracing::info!("submitting measurements for prediction");
                self.finish(client.predict(values).await);
                SubmitOutcome::Completed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPredictionApi;

    fn valid_values() -> FormValues {
        FormValues {
            nitrogen: "90".into(),
            phosphorus: "42".into(),
            potassium: "43".into(),
            temperature: "20.8".into(),
            humidity: "82".into(),
            ph: "6.5".into(),
            rainfall: "202.9".into(),
        }
    }

    fn success_client(crop: &str) -> MockPredictionApi {
        let crop = crop.to_string();
        let mut client = MockPredictionApi::new();
        client.expect_predict().times(1).returning(move |_| {
            Ok(PredictionResponse {
                predicted_crop: crop.clone(),
            })
        });
        client
    }

    mod transitions {
        use super::*;

        #[test]
        fn test_initial_state_is_idle() {
            let controller = SubmissionController::new();
            assert_eq!(*controller.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_begin_with_valid_input_enters_submitting() {
            let mut controller = SubmissionController::new();
            assert_eq!(controller.begin(&valid_values()), BeginOutcome::Ready);
            assert!(controller.is_submitting());
        }

        #[test]
        fn test_begin_with_invalid_input_does_not_transition() {
            let mut controller = SubmissionController::new();
            let mut values = valid_values();
            values.ph = "15".into();

            match controller.begin(&values) {
                BeginOutcome::Invalid(result) => {
                    assert!(result.error_for("ph").is_some());
                }
                other => panic!("expected Invalid, got {other:?}"),
            }
            assert_eq!(*controller.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_second_trigger_while_in_flight_is_suppressed() {
            let mut controller = SubmissionController::new();
            assert_eq!(controller.begin(&valid_values()), BeginOutcome::Ready);
            assert_eq!(controller.begin(&valid_values()), BeginOutcome::Suppressed);
            assert!(controller.is_submitting());
        }

        #[test]
        fn test_finish_success_carries_crop() {
            let mut controller = SubmissionController::new();
            controller.begin(&valid_values());
            controller.finish(Ok(PredictionResponse {
                predicted_crop: "rice".into(),
            }));
            assert_eq!(
                *controller.state(),
                SubmissionState::Success {
                    predicted_crop: "rice".into()
                }
            );
        }

        #[test]
        fn test_finish_failure_carries_message() {
            let mut controller = SubmissionController::new();
            controller.begin(&valid_values());
            controller.finish(Err(RequestError::Failed));
            assert_eq!(
                *controller.state(),
                SubmissionState::Failed {
                    message: "Prediction failed".into()
                }
            );
        }

        #[test]
        fn test_resubmission_allowed_from_success_and_failed() {
            let mut controller = SubmissionController::new();
            controller.begin(&valid_values());
            controller.finish(Err(RequestError::Failed));

            assert_eq!(controller.begin(&valid_values()), BeginOutcome::Ready);
            controller.finish(Ok(PredictionResponse {
                predicted_crop: "maize".into(),
            }));

            assert_eq!(controller.begin(&valid_values()), BeginOutcome::Ready);
            assert!(controller.is_submitting());
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn test_invalid_input_never_calls_the_client() {
            let mut client = MockPredictionApi::new();
            client.expect_predict().times(0);

            let mut controller = SubmissionController::new();
            let mut values = valid_values();
            values.nitrogen = "-5".into();

            let outcome = controller.submit(&values, &client).await;
            assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
            assert_eq!(*controller.state(), SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_any_single_invalid_field_blocks_the_request() {
            for (field, raw) in [("temperature", "999"), ("humidity", "-3"), ("rainfall", "x")] {
                let mut client = MockPredictionApi::new();
                client.expect_predict().times(0);

                let mut values = valid_values();
                match field {
                    "temperature" => values.temperature = raw.into(),
                    "humidity" => values.humidity = raw.into(),
                    _ => values.rainfall = raw.into(),
                }

                let mut controller = SubmissionController::new();
                let outcome = controller.submit(&values, &client).await;
                assert!(matches!(outcome, SubmitOutcome::Invalid(_)), "{field}");
            }
        }

        #[tokio::test]
        async fn test_successful_round_trip_ends_in_success() {
            let client = success_client("maize");
            let mut controller = SubmissionController::new();

            let outcome = controller.submit(&valid_values(), &client).await;
            assert_eq!(outcome, SubmitOutcome::Completed);
            assert_eq!(
                *controller.state(),
                SubmissionState::Success {
                    predicted_crop: "maize".into()
                }
            );
        }

        #[tokio::test]
        async fn test_http_failure_surfaces_generic_message() {
            let mut client = MockPredictionApi::new();
            client
                .expect_predict()
                .times(1)
                .returning(|_| Err(RequestError::Failed));

            let mut controller = SubmissionController::new();
            controller.submit(&valid_values(), &client).await;
            assert_eq!(
                *controller.state(),
                SubmissionState::Failed {
                    message: "Prediction failed".into()
                }
            );
        }

        #[tokio::test]
        async fn test_transport_failure_surfaces_transport_text() {
            let mut client = MockPredictionApi::new();
            client
                .expect_predict()
                .times(1)
                .returning(|_| Err(RequestError::Transport("connection refused".into())));

            let mut controller = SubmissionController::new();
            controller.submit(&valid_values(), &client).await;
            assert_eq!(
                *controller.state(),
                SubmissionState::Failed {
                    message: "connection refused".into()
                }
            );
        }

        #[tokio::test]
        async fn test_resubmit_overwrites_previous_result() {
            let mut client = MockPredictionApi::new();
            let mut crops = vec!["rice", "maize"];
            client.expect_predict().times(2).returning(move |_| {
                Ok(PredictionResponse {
                    predicted_crop: crops.remove(0).to_string(),
                })
            });

            let mut controller = SubmissionController::new();
            controller.submit(&valid_values(), &client).await;
            assert_eq!(
                *controller.state(),
                SubmissionState::Success {
                    predicted_crop: "rice".into()
                }
            );

            controller.submit(&valid_values(), &client).await;
            assert_eq!(
                *controller.state(),
                SubmissionState::Success {
                    predicted_crop: "maize".into()
                }
            );
        }

        #[tokio::test]
        async fn test_exactly_one_request_while_in_flight() {
            // Force the controller into Submitting, then confirm a second
            // trigger performs zero network calls.
            let mut gate = MockPredictionApi::new();
            gate.expect_predict().times(0);

            let mut controller = SubmissionController::new();
            assert_eq!(controller.begin(&valid_values()), BeginOutcome::Ready);

            let outcome = controller.submit(&valid_values(), &gate).await;
            assert_eq!(outcome, SubmitOutcome::Suppressed);
            assert!(controller.is_submitting());
        }

        #[tokio::test]
        async fn test_values_are_passed_through_unconverted() {
            let mut client = MockPredictionApi::new();
            client
                .expect_predict()
                .withf(|values: &FormValues| {
                    values.temperature == "20.8" && values.nitrogen == "90"
                })
                .times(1)
                .returning(|_| {
                    Ok(PredictionResponse {
                        predicted_crop: "rice".into(),
                    })
                });

            let mut controller = SubmissionController::new();
            controller.submit(&valid_values(), &client).await;
        }
    }
}
