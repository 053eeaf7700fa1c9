//! Small hand-written league used by the unit tests.

use std::path::Path;

use super::loader::{
    parse_table, RawAssist, RawCards, RawClass, RawGame, RawRoundStanding, RawScorer,
    ASSISTS_FILE, CARDS_FILE, CLASS_FILE, GAMES_FILE, ROUNDS_FILE, SCORERS_FILE,
};
use super::model::LeagueDataset;

pub const CLASS: &str = "\
,Season,SeasonOrder,Team,Games,Won,Drawn,Lost,Points,GoalsScored,GoalsConceded,GoalsDifference,VE,2A,A
0,1314,14,Benfica,30,23,5,2,74,58,18,40,1,1,50
1,1415,15,Benfica,34,27,4,3,85,86,16,70,1,0,60
2,1415,15,Porto,34,25,7,2,82,74,13,61,2,1,75
3,1415,15,Sporting,34,22,10,2,76,67,29,38,2,1,75
4,1516,16,Benfica,34,29,1,4,88,88,22,66,1,2,70
5,1516,16,Sporting,34,27,5,2,86,79,21,58,2,1,80
6,1516,16,Porto,34,23,4,7,73,67,30,37,2,1,90
7,1516,16,Braga,34,16,10,8,58,54,39,15,0,0,60
";

pub const ROUNDS: &str = "\
,Season,SeasonOrder,Round,Team,TotalPoints,Position
0,1314,14,1,Benfica,3,1
1,1415,15,1,Porto,3,1
2,1415,15,1,Benfica,1,2
3,1415,15,1,Sporting,1,3
4,1415,15,2,Benfica,4,1
5,1415,15,2,Porto,4,2
6,1415,15,2,Sporting,1,3
7,1516,16,3,Benfica,7,1
8,1516,16,3,Sporting,7,2
9,1516,16,3,Porto,5,3
10,1516,16,3,Braga,2,4
11,1516,16,1,Sporting,3,1
12,1516,16,1,Porto,3,2
13,1516,16,1,Benfica,1,3
14,1516,16,1,Braga,0,4
15,1516,16,2,Benfica,4,2
16,1516,16,2,Sporting,6,1
17,1516,16,2,Porto,4,3
18,1516,16,2,Braga,1,4
";

pub const GAMES: &str = "\
,Season,SeasonOrder,Round,Date,B365H,B365D,B365A,Match
0,1314,14,1,2013-08-18,1.4,4.5,8.0,Benfica 1-2 Maritimo
1,1415,15,1,2014-08-16,1.5,4.0,6.5,Porto 2-0 Maritimo
2,1516,16,1,2015-08-15,1.25,5.5,11.0,Benfica 4-0 Estoril
3,1516,16,1,2015-08-16,2.1,3.3,3.6,Braga 1-3 Sporting
4,1516,16,2,2015-08-21,2.6,3.2,2.8,Porto 1-1 Benfica
5,1516,16,2,2015-08-23,1.3,5.0,9.5,Sporting 2-0 Braga
";

pub const SCORERS: &str = "\
,Season,SeasonOrder,Player,Team,G
0,1415,15,Jackson Martinez,Porto,21
1,1415,15,Lima,Benfica,19
2,1516,16,Jonas,Benfica,32
3,1516,16,Slimani,Sporting,27
4,1516,16,Mitroglou,Benfica,20
5,1516,16,Aboubakar,Porto,13
";

pub const ASSISTS: &str = "\
,Season,SeasonOrder,Player,Team,ASS
0,1516,16,Gaitan,Benfica,12
1,1516,16,Pizzi,Benfica,10
2,1516,16,Joao Mario,Sporting,9
";

pub const CARDS: &str = "\
,Season,SeasonOrder,Player,Team,A,VE,2A
0,1516,16,Samaris,Benfica,11,0,1
1,1516,16,William Carvalho,Sporting,10,1,0
2,1516,16,Danilo,Porto,9,0,0
";

pub const LOGO_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfixture-logo";

/// Parse the fixture tables with the default cutoff (order 15).
pub fn dataset() -> LeagueDataset {
    let cutoff = 15;
    LeagueDataset {
        seasons: parse_table::<RawClass, _>(CLASS.as_bytes(), CLASS_FILE, cutoff).unwrap(),
        round_standings: parse_table::<RawRoundStanding, _>(ROUNDS.as_bytes(), ROUNDS_FILE, cutoff)
            .unwrap(),
        matches: parse_table::<RawGame, _>(GAMES.as_bytes(), GAMES_FILE, cutoff).unwrap(),
        scorers: parse_table::<RawScorer, _>(SCORERS.as_bytes(), SCORERS_FILE, cutoff).unwrap(),
        assists: parse_table::<RawAssist, _>(ASSISTS.as_bytes(), ASSISTS_FILE, cutoff).unwrap(),
        discipline: parse_table::<RawCards, _>(CARDS.as_bytes(), CARDS_FILE, cutoff).unwrap(),
        logo: LOGO_BYTES.into(),
    }
}

/// Write the fixture tables and logo into `dir` under their real file names.
pub fn write_dir(dir: &Path) {
    for (name, body) in [
        (CLASS_FILE, CLASS),
        (ROUNDS_FILE, ROUNDS),
        (GAMES_FILE, GAMES),
        (SCORERS_FILE, SCORERS),
        (ASSISTS_FILE, ASSISTS),
        (CARDS_FILE, CARDS),
    ] {
        std::fs::write(dir.join(name), body).unwrap();
    }
    std::fs::write(dir.join("liga-nos-png.png"), LOGO_BYTES).unwrap();
}
