mod velocity_tests;
