mod keypad;
