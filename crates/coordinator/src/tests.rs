//! Unit tests for the coordinator crate

#[cfg(test)]
mod validator_tests {
    use crate::domain::services::{candidate_string, is_valid_solution};

    #[test]
    fn test_brute_force_finds_valid_candidate() {
        // Difficulty 1: one hex digit, expected ~16 attempts
        let mut found = None;
        for nonce in 0..100_000u64 {
            let candidate = candidate_string(12, 7, nonce);
            if is_valid_solution(&candidate, 1) {
                found = Some(candidate);
                break;
            }
        }

        let candidate = found.expect("no valid candidate within 100k nonces");
        assert!(is_valid_solution(&candidate, 1));
    }

    #[test]
    fn test_validator_matches_known_digests() {
        // sha1("5:3:8") = 09e1732ac36c8da880147beff5cf65a5efe7e83e
        assert!(is_valid_solution("5:3:8", 1));
        assert!(!is_valid_solution("5:3:8", 2));

        // sha1("5:3:42") = 91fe545e... (no leading zero)
        assert!(!is_valid_solution("5:3:42", 1));
    }

    #[test]
    fn test_out_of_range_difficulty_clamped_both_ways() {
        for candidate in ["5:3:8", "5:3:42", "vec196"] {
            assert_eq!(
                is_valid_solution(candidate, 0),
                is_valid_solution(candidate, 1)
            );
            assert_eq!(
                is_valid_solution(candidate, -7),
                is_valid_solution(candidate, 1)
            );
            assert_eq!(
                is_valid_solution(candidate, 8),
                is_valid_solution(candidate, 7)
            );
            assert_eq!(
                is_valid_solution(candidate, 1_000),
                is_valid_solution(candidate, 7)
            );
        }
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::entities::TransactionStatus;
    use crate::domain::repository::SubmitOutcome;
    use crate::presentation::dto::*;

    #[test]
    fn test_submit_request_wire_names() {
        let json = r#"{"transactionId":5,"clientId":3,"solution":"5:3:8"}"#;
        let request: SubmitRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.transaction_id, 5);
        assert_eq!(request.client_id, 3);
        assert_eq!(request.solution, "5:3:8");
    }

    #[test]
    fn test_winner_response_wire_names() {
        let response = WinnerResponse { client_id: 42 };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"clientId":42}"#);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_code(Some(TransactionStatus::Resolved)), 0);
        assert_eq!(status_code(Some(TransactionStatus::Pending)), 1);
        assert_eq!(status_code(None), -1);
    }

    #[test]
    fn test_submit_outcome_codes() {
        assert_eq!(SubmitResponse::from(SubmitOutcome::Accepted).code, 1);
        assert_eq!(SubmitResponse::from(SubmitOutcome::RejectedInvalid).code, 0);
        assert_eq!(SubmitResponse::from(SubmitOutcome::AlreadySolved).code, 2);
        assert_eq!(
            SubmitResponse::from(SubmitOutcome::UnknownTransaction).code,
            -1
        );
    }

    #[test]
    fn test_solution_response_roundtrip() {
        let response = SolutionResponse {
            status: codes::STATUS_RESOLVED,
            solution: "5:3:8".to_string(),
            difficulty: 1,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""status":0"#));
        assert!(json.contains(r#""solution":"5:3:8""#));

        let back: SolutionResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.solution, "5:3:8");
    }
}

#[cfg(test)]
mod coordination_tests {
    use crate::application::current_transaction::CurrentTransactionUseCase;
    use crate::application::query_transaction::QueryTransactionUseCase;
    use crate::application::submit_solution::{SubmitSolutionInput, SubmitSolutionUseCase};
    use crate::domain::entities::TransactionStatus;
    use crate::domain::repository::SubmitOutcome;
    use crate::domain::value_objects::{ClientId, DifficultyRange, TransactionId};
    use crate::infra::memory::InMemoryTransactionTable;
    use std::sync::Arc;

    fn fixed_difficulty_table() -> Arc<InMemoryTransactionTable> {
        Arc::new(InMemoryTransactionTable::new(DifficultyRange::new(1, 1)))
    }

    async fn submit(
        repo: &Arc<InMemoryTransactionTable>,
        txid: i64,
        client: i64,
        candidate: &str,
    ) -> SubmitOutcome {
        SubmitSolutionUseCase::new(repo.clone())
            .execute(SubmitSolutionInput {
                transaction_id: TransactionId(txid),
                client_id: ClientId(client),
                candidate: candidate.to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_submit_semantics() {
        let repo = fixed_difficulty_table();

        // Walk the table forward to transaction id 5 with precomputed
        // difficulty-1 candidates for client 3
        for (txid, candidate) in [
            (0, "0:3:17"),
            (1, "1:3:28"),
            (2, "2:3:6"),
            (3, "3:3:13"),
            (4, "4:3:52"),
        ] {
            assert_eq!(
                submit(&repo, txid, 3, candidate).await,
                SubmitOutcome::Accepted
            );
        }

        let current = CurrentTransactionUseCase::new(repo.clone())
            .execute()
            .await
            .unwrap();
        assert_eq!(current, TransactionId(5));

        // sha1("5:3:8") starts with "0": accepted
        assert_eq!(submit(&repo, 5, 3, "5:3:8").await, SubmitOutcome::Accepted);

        // Any second submission for id 5 is too late
        assert_eq!(
            submit(&repo, 5, 9, "5:9:whatever").await,
            SubmitOutcome::AlreadySolved
        );

        // Never-issued id
        assert_eq!(
            submit(&repo, 999, 3, "999:3:0").await,
            SubmitOutcome::UnknownTransaction
        );
    }

    #[tokio::test]
    async fn test_unknown_id_reads_are_sentinels_not_faults() {
        let repo = fixed_difficulty_table();
        let queries = QueryTransactionUseCase::new(repo.clone());
        let unknown = TransactionId(999);

        assert!(queries.challenge(unknown).await.unwrap().is_none());
        assert!(queries.status(unknown).await.unwrap().is_none());
        assert!(queries.winner(unknown).await.unwrap().is_none());
        assert!(queries.solution(unknown).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_winner_and_solution_views() {
        let repo = fixed_difficulty_table();
        let queries = QueryTransactionUseCase::new(repo.clone());
        let tx0 = TransactionId(0);

        // Pending: transaction exists, no winner, solution withheld
        assert_eq!(queries.winner(tx0).await.unwrap(), Some(None));
        let view = queries.solution(tx0).await.unwrap().unwrap();
        assert_eq!(view.status, TransactionStatus::Pending);
        assert!(view.solution.is_empty());

        submit(&repo, 0, 3, "0:3:17").await;

        assert_eq!(queries.winner(tx0).await.unwrap(), Some(Some(ClientId(3))));
        let view = queries.solution(tx0).await.unwrap().unwrap();
        assert_eq!(view.status, TransactionStatus::Resolved);
        assert_eq!(view.solution, "0:3:17");
    }

    #[tokio::test]
    async fn test_successor_difficulty_drawn_from_range_after_resolve() {
        let range = DifficultyRange::new(2, 2);
        let repo = Arc::new(InMemoryTransactionTable::new(range));
        let queries = QueryTransactionUseCase::new(repo.clone());

        // sha1("0:3:106") = 0091396a... satisfies difficulty 2
        assert_eq!(submit(&repo, 0, 3, "0:3:106").await, SubmitOutcome::Accepted);

        // The rollover triggered by the resolve must draw the successor's
        // difficulty from the configured range, not reuse tx 0's
        let next = CurrentTransactionUseCase::new(repo.clone())
            .execute()
            .await
            .unwrap();
        assert_eq!(next, TransactionId(1));

        let difficulty = queries.challenge(next).await.unwrap().unwrap();
        assert!(range.contains(difficulty));
    }

    #[tokio::test]
    async fn test_rollover_draws_difficulty_from_configured_range() {
        let range = DifficultyRange::new(2, 4);
        let repo = Arc::new(InMemoryTransactionTable::new(range));
        let queries = QueryTransactionUseCase::new(repo.clone());

        let first = CurrentTransactionUseCase::new(repo.clone())
            .execute()
            .await
            .unwrap();
        let difficulty = queries.challenge(first).await.unwrap().unwrap();
        assert!(range.contains(difficulty));
    }
}
