mod cli_tests;
