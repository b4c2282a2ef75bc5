#[cfg(test)]
mod tests {

    use std::error::Error;

    use ron;
    use rs_connections::*;

    fn create_game() -> Result<GameEngine, EngineError> {
        new_game(vec![
            vec!["bass", "flounder", "salmon", "trout"],
            vec!["ant", "drill", "island", "opal"],
            vec!["bucks", "heat", "jazz", "nets"],
            vec!["are", "queue", "sea", "why"],
        ])
    }

    #[test]
    fn game_state_view_serde() -> Result<(), Box<dyn Error>> {
        let mut game = create_game()?;
        for index in [4, 5, 6, 7, 0, 8] {
            game.toggle_selection(index)?;
        }
        game.submit_guess()?;
        game.toggle_selection(12)?;
        game.toggle_selection(1)?;
        let view = game.snapshot();

        let ser = ron::to_string(&view);
        assert!(ser.is_ok());

        let deser = ron::from_str::<GameStateView>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), view);
        Ok(())
    }

    #[test]
    fn guess_history_serde() -> Result<(), Box<dyn Error>> {
        let mut game = create_game()?;
        let commands = parse_script("0 4 8 12 g 4 8 12 1 2 3 g 4 5 6 7 g")?;
        replay(&mut game, &commands);
        let history = game.guess_history().to_vec();

        let ser = ron::to_string(&history)?;
        let deser = ron::from_str::<Vec<Guess>>(&ser)?;

        assert_eq!(deser, history);
        assert_eq!(
            deser.iter().map(Guess::is_correct).collect::<Vec<bool>>(),
            vec![false, true, true]
        );
        Ok(())
    }

    #[test]
    fn outcome_serde() -> Result<(), Box<dyn Error>> {
        let outcome = Some(GameOutcome::Lost);

        let ser = ron::to_string(&outcome)?;
        let deser = ron::from_str::<Option<GameOutcome>>(&ser)?;

        assert_eq!(deser, outcome);
        Ok(())
    }

    #[test]
    fn group_id_serde_rejects_out_of_range() -> Result<(), Box<dyn Error>> {
        let group_id = GroupId::new(2).unwrap();

        let ser = ron::to_string(&group_id)?;
        assert_eq!(ron::from_str::<GroupId>(&ser)?, group_id);

        assert!(ron::from_str::<GroupId>("4").is_err());
        assert!(ron::from_str::<GroupId>("9").is_err());
        assert!(ron::from_str::<Option<GroupId>>("Some(255)").is_err());
        Ok(())
    }
}
