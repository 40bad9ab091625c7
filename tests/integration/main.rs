mod rewrite_tests;
